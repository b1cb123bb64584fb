// Editor profile: committed profile, edit-mode draft, and the generic
// add/update/remove editor shared by the experience, education and
// certification lists.

pub mod editable_list;
pub mod handlers;
pub mod seed;
pub mod session;
