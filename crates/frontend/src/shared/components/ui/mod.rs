pub mod badge;
pub mod button;
pub mod checkbox;
pub mod select;
pub mod text_field;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use select::Select;
pub use text_field::TextField;
pub use textarea::Textarea;
