//! The fixed env-file template.

use fixture_generator::SecretSet;

/// Render the env-file text with the given secrets and bucket name.
pub fn render_env(secrets: &SecretSet, bucket: &str) -> String {
    format!(
        "############################################################
# Application Environment Configuration
# (DO NOT COMMIT THIS FILE)
############################################################

# Application
APP_NAME={app_name}
APP_ENV={app_env}
APP_PORT=8080
LOG_LEVEL=INFO

# Database
DB_HOST=customer-db.internal
DB_PORT=5432
DB_NAME=customer
DB_USER={db_user}
DB_PASSWORD={db_password}

# AWS Configuration
AWS_REGION=ap-northeast-2
AWS_ACCESS_KEY_ID={access_key_id}
AWS_SECRET_ACCESS_KEY={secret_access_key}

# S3
S3_BUCKET={bucket}
S3_PREFIX=upload/

# External API
PAYMENT_API_ENDPOINT=https://api.payment.example.com
PAYMENT_API_KEY={payment_api_key}

# SSH Access (Legacy Bastion)
SSH_USER=ec2-user
SSH_HOST=bastion.internal

{ssh_private_key}

############################################################
# End of file
############################################################
",
        app_name = secrets.app_name,
        app_env = secrets.app_env,
        db_user = secrets.db_user,
        db_password = secrets.db_password,
        access_key_id = secrets.access_key_id,
        secret_access_key = secrets.secret_access_key,
        payment_api_key = secrets.payment_api_key,
        ssh_private_key = secrets.ssh_private_key,
    )
}
