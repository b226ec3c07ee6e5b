//! QueryDispatcher: one typed request in, one generated completion out.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::core::generate::TextGenerator;
use crate::core::templates;
use crate::error::DispatchError;
use crate::models::{GeneratedResponse, PatientProfile, PromptRequest, VitalsRecord};

/// Read-only view over the patient snapshot for one dispatch. No request
/// mutates the underlying profile or vitals.
#[derive(Clone, Copy)]
pub struct PatientContext<'a> {
    pub profile: &'a PatientProfile,
    pub vitals: &'a [VitalsRecord],
}

/// Stateless mediator between structured patient data and the generation
/// backend. Each call is an independent, single round trip.
pub struct QueryDispatcher {
    generator: Arc<dyn TextGenerator>,
}

impl QueryDispatcher {
    /// The generator is injected here; there is no process-wide client.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    #[instrument(skip(self, request, context), fields(kind = %request.kind))]
    pub async fn dispatch(
        &self,
        request: &PromptRequest,
        context: PatientContext<'_>,
    ) -> Result<GeneratedResponse, DispatchError> {
        // Context-derived fields first, request parameters win on overlap.
        let mut parameters = templates::context_parameters(context.profile, context.vitals);
        for (name, value) in &request.parameters {
            parameters.insert(name.clone(), value.clone());
        }

        let prompt = templates::render(request.kind, &parameters)?;
        debug!(prompt_len = prompt.len(), "submitting prompt");

        let result = self.generator.generate(&prompt).await?;
        let first = result
            .results
            .into_iter()
            .next()
            .ok_or_else(|| DispatchError::BackendResponse {
                reason: "empty result set".to_string(),
            })?;

        Ok(GeneratedResponse {
            text: first.generated_text,
        })
    }
}
