pub mod coinbase;

use hmac::Hmac;
use sha2::Sha256;

/*----- */
// Convenient types
/*----- */
pub type HmacSha256 = Hmac<Sha256>;
