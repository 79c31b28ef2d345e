// Primitive coercers: number, string and boolean

pub mod boolean;
pub mod number;
pub mod string;

pub use self::boolean::{boolean, BooleanSchema};
pub use self::number::{number, NumberSchema};
pub use self::string::{string, StringSchema};
