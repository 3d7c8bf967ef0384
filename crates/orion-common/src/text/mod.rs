//! Text sanitizers applied to user input before it is stored

mod safe_string;

pub use safe_string::{
    safe_clave, safe_curp, safe_email, safe_message, safe_rfc, safe_string, transliterate,
    DEFAULT_MESSAGE, MAX_MESSAGE_LEN,
};
