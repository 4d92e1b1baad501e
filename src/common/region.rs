// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use tracing::debug;

/// The AWS region that clients are created in.
///
/// When no region is set, the AWS SDK default provider chain decides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Returns a `Region` taken from `AWS_REGION` or `AWS_DEFAULT_REGION`.
    pub fn new() -> Self {
        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .find_map(|var| env::var(var).ok())
            .map(region::Region::new);

        debug!("Region in environment is: {:?}", region);

        Self {
            region,
        }
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Override the region.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        self.region = Some(region::Region::new(region.to_string()));
        self
    }
}

impl ProvideRegion for Region {
    // Hands our region to the SDK config loader, `None` falls through to the
    // rest of the SDK's region resolution.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}
