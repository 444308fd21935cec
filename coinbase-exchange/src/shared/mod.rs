pub mod de;
pub mod utils;
