pub mod content;
pub mod emailjs;
