mod hash;
mod holder;
mod id;
mod test_util;

pub use hash::{
    FastHashMap,
    FastHashSet,
};
pub use holder::{
    BooleanHolder,
    Holder,
    IntegerHolder,
    NumberHolder,
    TargetHolder,
    TypeHolder,
};
pub use id::{
    Id,
    Identifiable,
};
#[cfg(test)]
pub use test_util::{
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
