//! Snapshot exports shared across integration tests.

/// Sprint starting March 2024, four months, 20 000 € primary target.
///
/// - Ada: 4 000 € primary (March), 6 000 € secondary new customer (April),
///   50% share of "Echodeck Growth"
/// - Grace: 1 000 € primary (April), 4 000 € secondary (March), no share
/// - one win from Ada, one blocker from a founder who left
pub const TEAM_SNAPSHOT: &str = r#"{
    "config": [
        { "key": "sprintStartYear", "value": "2024" },
        { "key": "sprintStartMonth", "value": "3" },
        { "key": "totalMonths", "value": "4" },
        { "key": "totalTarget", "value": "20000" }
    ],
    "founders": [
        { "id": 1, "name": "Ada", "target": 10000, "access_key": "ada-key" },
        { "id": 2, "name": "Grace", "target": 10000, "access_key": "grace-key" }
    ],
    "revenue": [
        { "id": 1, "founder_id": 1, "amount": 4000, "date": "2024-03-10", "description": "Consulting", "source": "primary", "is_new_customer": false },
        { "id": 2, "founder_id": 2, "amount": 1000, "date": "2024-04-03", "source": "primary", "is_new_customer": false },
        { "id": 3, "founder_id": 1, "amount": 6000, "date": "2024-04-12", "description": "Annual plan", "source": "secondary", "is_new_customer": true },
        { "id": 4, "founder_id": 2, "amount": 4000, "date": "2024-03-20", "source": "secondary", "is_new_customer": false }
    ],
    "posts": [
        { "id": 1, "author_id": 1, "text": "Closed the Acme pilot", "type": "win", "timestamp": "2024-04-02T09:00:00+00:00" },
        { "id": 2, "author_id": 9, "text": "Waiting on legal", "type": "blocker", "timestamp": "2024-04-05T09:00:00+00:00" }
    ],
    "secondary_missions": [
        { "id": 7, "name": "Echodeck Growth", "description": "Product ARR", "target_arr": 100000, "target_customers": 20 }
    ],
    "founder_secondary_missions": [
        { "id": 1, "founder_id": 1, "mission_id": 7, "share_percentage": 50 }
    ]
}"#;

/// A snapshot whose settings rows omit the sprint start
pub const MISSING_START_SNAPSHOT: &str = r#"{
    "config": [
        { "key": "totalMonths", "value": "4" }
    ],
    "founders": []
}"#;

/// No settings at all, no missions: totals fall back to founder targets
pub const BARE_SNAPSHOT: &str = r#"{
    "config": [
        { "key": "sprintStartYear", "value": 2024 },
        { "key": "sprintStartMonth", "value": 1 },
        { "key": "totalMonths", "value": 10 }
    ],
    "founders": [
        { "id": 1, "name": "Ada", "target": 3000 },
        { "id": 2, "name": "Grace", "target": 2000 }
    ]
}"#;
