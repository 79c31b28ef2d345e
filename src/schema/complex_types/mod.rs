// Composite coercers: array and object, delegating to child schemas

pub mod array;
pub mod object;

pub use self::array::{array, ArraySchema};
pub use self::object::{field, object, Field, Fields, ObjectSchema};
