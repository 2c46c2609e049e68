// Authentication components

pub mod protected;
pub mod require_auth;

pub use protected::Protected;
pub use require_auth::RequireAuth;
