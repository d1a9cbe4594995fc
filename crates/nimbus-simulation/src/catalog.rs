//! Static catalog of the simulated deployment
//!
//! IAM users, deployed functions, the public endpoint and a handful of sample
//! log lines. Fixed data, shown as-is by the display surface.

use nimbus_core::IamRole;
use serde::Serialize;

/// Public endpoint of the simulated API
pub const PUBLIC_ENDPOINT: &str = "https://api.scalableapps.dev/v1/auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IamUser {
    pub user_id: &'static str,
    pub role: IamRole,
    pub permissions: &'static str,
    pub mfa_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerlessFunction {
    pub name: &'static str,
    pub region: &'static str,
    pub trigger: &'static str,
    pub last_modified: &'static str,
}

pub static IAM_USERS: [IamUser; 4] = [
    IamUser {
        user_id: "admin_user",
        role: IamRole::Admin,
        permissions: "FullAccess",
        mfa_enabled: true,
    },
    IamUser {
        user_id: "devops_engineer",
        role: IamRole::DevOps,
        permissions: "Deploy, Monitor",
        mfa_enabled: true,
    },
    IamUser {
        user_id: "api_gateway_user",
        role: IamRole::ApiTrigger,
        permissions: "Invoke",
        mfa_enabled: false,
    },
    IamUser {
        user_id: "analyst_user",
        role: IamRole::Viewer,
        permissions: "ReadOnly",
        mfa_enabled: true,
    },
];

pub static FUNCTIONS: [ServerlessFunction; 4] = [
    ServerlessFunction {
        name: "authHandler",
        region: "us-east-1",
        trigger: "API Gateway",
        last_modified: "2025-04-20",
    },
    ServerlessFunction {
        name: "paymentProcessor",
        region: "us-west-2",
        trigger: "Pub/Sub",
        last_modified: "2025-04-19",
    },
    ServerlessFunction {
        name: "dataIngestor",
        region: "asia-south1",
        trigger: "S3 Event",
        last_modified: "2025-04-18",
    },
    ServerlessFunction {
        name: "analyticsJob",
        region: "europe-west3",
        trigger: "Scheduler",
        last_modified: "2025-04-17",
    },
];

pub static SAMPLE_LOGS: [&str; 7] = [
    "[14:01:55] authHandler invoked (cold start)",
    "[14:02:01] authHandler returned 200 OK (342 ms)",
    "[14:03:21] authHandler returned 401 Unauthorized (312 ms)",
    "[14:04:05] paymentProcessor triggered by event (185 ms)",
    "[14:04:06] paymentProcessor returned 200 OK",
    "[14:05:40] dataIngestor triggered by upload",
    "[14:05:41] dataIngestor returned 202 Accepted (499 ms)",
];
