pub(crate) mod layout;
pub(crate) mod split_view;
