use crate::types::{PlanFeature, PricingPlan};

fn features(storage: &'static str, credits: &'static str, connections: &'static str, support: &'static str) -> Vec<PlanFeature> {
    vec![
        PlanFeature { key: "storage", value: storage },
        PlanFeature { key: "credits", value: credits },
        PlanFeature { key: "connections", value: connections },
        PlanFeature { key: "support", value: support },
    ]
}

pub fn plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "basic",
            title_key: "basicPlan",
            monthly_vnd: 99_000,
            yearly_vnd: 999_000,
            features: features("10GB", "100", "2", "Email"),
            highlight: false,
        },
        PricingPlan {
            id: "pro",
            title_key: "proPlan",
            monthly_vnd: 199_000,
            yearly_vnd: 1_999_000,
            features: features("50GB", "500", "5", "Priority Email"),
            highlight: true,
        },
        PricingPlan {
            id: "enterprise",
            title_key: "enterprisePlan",
            monthly_vnd: 399_000,
            yearly_vnd: 3_999_000,
            features: features("200GB", "2000", "Unlimited", "24/7 Phone & Email"),
            highlight: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillingCycle;

    #[test]
    fn test_exactly_one_plan_is_highlighted() {
        assert_eq!(plans().iter().filter(|p| p.highlight).count(), 1);
    }

    #[test]
    fn test_price_follows_cycle() {
        let basic = &plans()[0];
        assert_eq!(basic.price(BillingCycle::Monthly), 99_000);
        assert_eq!(basic.price(BillingCycle::Yearly), 999_000);
    }
}
