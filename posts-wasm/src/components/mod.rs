pub(crate) mod add_post_form;
pub(crate) mod pagination_bar;
pub(crate) mod post_list;
