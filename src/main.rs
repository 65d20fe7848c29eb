#[cfg(feature = "csr")]
fn main() {
    localconvert_web::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {}
