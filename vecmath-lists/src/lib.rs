mod list;
mod list_type;

pub use list::{ List, SharedList };
pub use list_type::{
    ListElement, ListType,
    float_list_type, float3_list_type, int32_list_type, bool_list_type,
};

use vecmath_impl::Float3;

pub type SharedFloatList = SharedList<f32>;
pub type SharedFloat3List = SharedList<Float3>;
pub type SharedInt32List = SharedList<i32>;
pub type SharedBoolList = SharedList<bool>;
