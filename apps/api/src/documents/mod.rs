// Document panels: résumé, cover letter and LinkedIn summary.
// Each is a stateless form → template → model round trip.

pub mod forms;
pub mod handlers;
pub mod prompts;
