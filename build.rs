//! Build script for Folio
//!
//! EmailJS credentials are captured at compile time with `option_env!`, so the
//! crate must be rebuilt whenever they change.

fn main() {
    println!("cargo:rerun-if-env-changed=FOLIO_EMAILJS_SERVICE_ID");
    println!("cargo:rerun-if-env-changed=FOLIO_EMAILJS_TEMPLATE_ID");
    println!("cargo:rerun-if-env-changed=FOLIO_EMAILJS_PUBLIC_KEY");
}
