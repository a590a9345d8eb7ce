//! Feature family prefixes and default labels for consistency across the codebase

pub const DEFAULT_TRIGGER_LABEL: &str = "O";
pub const DEFAULT_ROLE_LABEL: &str = "NON";
pub const TRIGGER_WORD_SENTINEL: &str = "TriggerWord";
pub const TIME_ROLE_PREFIX: &str = "Time";
pub const TITLE_MENTION_TYPE: &str = "Job-Title";

pub const MAX_PATH_DISTANCE: usize = 3;
pub const MAX_BETWEEN_GAP: usize = 3;
pub const ROLE_COUNT_CAP: usize = 3;

// trigger pairs
pub const TRIGGER_PAIR: &str = "triggerPair=";
pub const TRIGGER_PAIR_SAME_CLAUSE: &str = "triggerPairSameClause=";
pub const TRIGGER_PAIR_DEP_PATH: &str = "triggerPairDepPath=";
pub const SAME_WORD_SAME_LABEL: &str = "SameWordSameLabel=";

// arguments of one trigger
pub const SAME_ROLE: &str = "sameRole:";
pub const ONE_ENTITY_TWO_ARGS: &str = "oneEntityTwoArgs:";
pub const ENTITIES_OVERLAP: &str = "entitiesOverlap:";
pub const RELEVANT_ROLES: &str = "relevantRoles:";

// completed trigger
pub const ROLE_NUM: &str = "roleNum:";
pub const TIME_ARG_PAIR: &str = "timeArgPair=";

// two triggers sharing an argument
pub const SAME_MENTION_TRIGGERS: &str = "same_mention_triggers:";
pub const SAME_MENTION_ROLES: &str = "same_mention_roles:";
pub const SAME_MENTION_DEP: &str = "same_mention_dep:";
pub const SAME_ENTITY_TRIGGERS: &str = "same_entity_triggers:";
pub const SAME_ENTITY_ROLES: &str = "same_entity_roles:";

/// Role pairs that describe two sides of one event (`relevantRoles:` family)
pub const RELATED_ROLE_PAIRS: [(&str, &str); 3] = [
    ("Attacker", "Target"),
    ("Victim", "Agent"),
    ("Agent", "Artifact"),
];
