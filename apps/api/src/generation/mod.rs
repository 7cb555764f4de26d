// The CV generation pipeline: parse request → render template → rasterize.
// Stateless: each request owns its document, HTML, and PDF for the
// handler's lifetime; nothing survives the response.

pub mod handlers;
