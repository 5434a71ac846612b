use std::sync::LazyLock;

use vecmath_impl::Float3;

/// Describes the element type held by a numeric list.
#[derive(Debug, PartialEq, Eq)]
pub struct ListType {
    pub name: &'static str,
    pub element_name: &'static str,
    pub element_size: usize,
}

impl ListType {
    fn of<T>(name: &'static str, element_name: &'static str) -> ListType {
        ListType { name, element_name, element_size: std::mem::size_of::<T>() }
    }
}

/// Element types that can be stored in a numeric list.
pub trait ListElement: Copy + Send + Sync + 'static {
    fn list_type() -> &'static ListType;
}

static FLOAT_LIST: LazyLock<ListType> = LazyLock::new(|| ListType::of::<f32>("Float List", "Float"));
static FLOAT3_LIST: LazyLock<ListType> = LazyLock::new(|| ListType::of::<Float3>("Vector List", "Vector"));
static INT32_LIST: LazyLock<ListType> = LazyLock::new(|| ListType::of::<i32>("Integer List", "Integer"));
static BOOL_LIST: LazyLock<ListType> = LazyLock::new(|| ListType::of::<bool>("Boolean List", "Boolean"));

pub fn float_list_type() -> &'static ListType {
    &FLOAT_LIST
}

pub fn float3_list_type() -> &'static ListType {
    &FLOAT3_LIST
}

pub fn int32_list_type() -> &'static ListType {
    &INT32_LIST
}

pub fn bool_list_type() -> &'static ListType {
    &BOOL_LIST
}

impl ListElement for f32 {
    fn list_type() -> &'static ListType { float_list_type() }
}

impl ListElement for Float3 {
    fn list_type() -> &'static ListType { float3_list_type() }
}

impl ListElement for i32 {
    fn list_type() -> &'static ListType { int32_list_type() }
}

impl ListElement for bool {
    fn list_type() -> &'static ListType { bool_list_type() }
}
