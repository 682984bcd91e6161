// Roadmap generation: the result record, the declared output schema, the
// prompt, and the requester that ties them to one Gemini call.

pub mod models;
pub mod prompts;
pub mod requester;
pub mod schema;

pub use models::{Roadmap, RoadmapPhase};
pub use requester::{GeminiRoadmapRequester, RequestError, RoadmapRequester};
