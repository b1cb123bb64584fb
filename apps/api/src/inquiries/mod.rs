// Client-side inquiries: quote requests and contact messages.
// Both are accepted as typed JSON and handed to the submission sink.

pub mod handlers;
