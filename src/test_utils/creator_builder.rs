use crate::Creator;
use crate::CreatorId;

/// Fluent fixture builder for creator records in tests.
pub struct CreatorBuilder {
    creator: Creator,
}

impl CreatorBuilder {
    pub fn new(id: CreatorId) -> Self {
        Self {
            creator: Creator {
                id,
                channel_id: String::new(),
                handle: String::new(),
                original_name: String::new(),
                display_name: String::new(),
                affiliation: String::new(),
                avatar_url: String::new(),
                status: String::new(),
            },
        }
    }

    pub fn channel_id(
        mut self,
        channel_id: &str,
    ) -> Self {
        self.creator.channel_id = channel_id.to_string();
        self
    }

    pub fn handle(
        mut self,
        handle: &str,
    ) -> Self {
        self.creator.handle = handle.to_string();
        self
    }

    pub fn original_name(
        mut self,
        name: &str,
    ) -> Self {
        self.creator.original_name = name.to_string();
        self
    }

    pub fn display_name(
        mut self,
        name: &str,
    ) -> Self {
        self.creator.display_name = name.to_string();
        self
    }

    pub fn affiliation(
        mut self,
        affiliation: &str,
    ) -> Self {
        self.creator.affiliation = affiliation.to_string();
        self
    }

    pub fn build(self) -> Creator {
        self.creator
    }
}
