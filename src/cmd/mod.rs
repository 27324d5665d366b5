pub mod calibrate;
pub mod detect;
pub mod generate;
