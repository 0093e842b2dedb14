mod boolean;
mod integer;
mod list;
mod multi_select;
mod object;
mod select;
mod text;

pub use boolean::BooleanProp;
pub use integer::IntegerProp;
pub use list::ListProp;
pub use multi_select::MultiSelectProp;
pub use object::ObjectProp;
pub use select::SelectProp;
pub use text::TextProp;
