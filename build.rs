const PLACEHOLDER_ENDPOINT: &str = "https://formspree.io/f/YOUR_UNIQUE_ID";

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The contact form posts straight to a hosted form service
    let endpoint = std::env::var("CONTACT_FORM_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_ENDPOINT.to_string());
    println!("cargo:rustc-env=CONTACT_FORM_ENDPOINT={}", endpoint);
    println!("cargo:rustc-env=CONTACT_FORM_PLACEHOLDER={}", PLACEHOLDER_ENDPOINT);

    println!("cargo:rerun-if-env-changed=CONTACT_FORM_ENDPOINT");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
