pub mod otp_store;
pub mod password;
pub mod token;

pub use otp_store::InMemoryOtpStore;
pub use password::Argon2PasswordHasher;
pub use token::HmacTokenManager;
