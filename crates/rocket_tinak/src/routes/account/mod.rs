pub mod register_initiate;
pub mod resend_verification;
pub mod verify_email;
