
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const CONTACT_PATH: &str = "/api/contact";

/// Local storage key holding the admin flag. Only the session gate touches it.
pub const SESSION_KEY: &str = "syntech_admin_authed";

pub fn contact_url() -> String {
    format!("{}{}", get_backend_url(), CONTACT_PATH)
}
