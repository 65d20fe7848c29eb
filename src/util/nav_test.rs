use super::*;
use std::cell::RefCell;

#[test]
fn internal_destinations_have_routes() {
    assert_eq!(Destination::Home.route(), Some("/"));
    assert_eq!(Destination::Login.route(), Some("/login"));
    assert_eq!(Destination::Pricing.route(), Some("/pricing"));
    assert_eq!(Destination::Subscriptions.route(), Some("/subscriptions"));
    assert_eq!(Destination::External("https://checkout.stripe.com/x".to_owned()).route(), None);
}

#[test]
fn go_routes_internal_destinations_through_navigate() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());
    go(&navigate, &Destination::Login);
    go(&navigate, &Destination::External("https://checkout.stripe.com/x".to_owned()));
    assert_eq!(visited.into_inner(), vec!["/login".to_owned()]);
}

#[test]
fn non_empty_trims_and_drops_blank_values() {
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("   ".to_owned())), None);
    assert_eq!(non_empty(Some(" tok ".to_owned())), Some("tok".to_owned()));
}
