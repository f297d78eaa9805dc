use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub capacity_units: u32,
    pub name_prefix: &'static str,
    pub concurrency_limit: u32,
}

pub const PRODUCTION: Profile = Profile {
    capacity_units: 200,
    name_prefix: "PROD",
    concurrency_limit: 100,
};

pub const STAGE: Profile = Profile {
    capacity_units: 5,
    name_prefix: "STAGE",
    concurrency_limit: 5,
};

impl Profile {
    pub fn select(is_production: bool) -> Self {
        if is_production {
            PRODUCTION
        } else {
            STAGE
        }
    }

    pub fn table_name(&self) -> String {
        format!("{}_CDK_USERS", self.name_prefix)
    }

    pub fn api_name(&self) -> String {
        format!("{}_CDK_API", self.name_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_profile() {
        let profile = Profile::select(true);
        assert_eq!(profile.capacity_units, 200);
        assert_eq!(profile.name_prefix, "PROD");
        assert_eq!(profile.concurrency_limit, 100);
    }

    #[test]
    fn stage_profile() {
        let profile = Profile::select(false);
        assert_eq!(profile.capacity_units, 5);
        assert_eq!(profile.name_prefix, "STAGE");
        assert_eq!(profile.concurrency_limit, 5);
    }

    #[test]
    fn resource_names_carry_the_prefix() {
        assert_eq!(PRODUCTION.table_name(), "PROD_CDK_USERS");
        assert_eq!(STAGE.api_name(), "STAGE_CDK_API");
    }
}
