use crate::domain::identity::Plan;

/// Daily download quota per plan.
const PLAN_LIMITS: [(Plan, u32); 5] = [
    (Plan::Anon, 1),
    (Plan::Free, 3),
    (Plan::Basic, 200),
    (Plan::Pro, 450),
    (Plan::Vip, 1500),
];

pub fn plan_limit(plan: Plan) -> u32 {
    PLAN_LIMITS
        .iter()
        .find(|(candidate, _)| *candidate == plan)
        .map_or(0, |(_, limit)| *limit)
}
