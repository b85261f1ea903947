use quote_form::relay::SubmissionRelay;

pub struct SubmissionAppContainer(SubmissionRelay);

impl SubmissionAppContainer {
    pub fn new(relay: SubmissionRelay) -> Self {
        Self(relay)
    }

    pub fn get_relay(&self) -> &SubmissionRelay {
        &self.0
    }
}
