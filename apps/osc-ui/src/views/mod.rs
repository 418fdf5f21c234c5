pub mod inspect_view;

pub use inspect_view::InspectView;
