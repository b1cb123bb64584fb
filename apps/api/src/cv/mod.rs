// CV upload flow: declared-type/size validation plus the multipart form
// handler that hands accepted submissions to the submission sink.

pub mod form;
pub mod handlers;
pub mod validation;
