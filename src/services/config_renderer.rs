//! Renders the embedded node configuration templates.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};

use crate::domain::{AppError, AuthMethod, ClusterConfig, PRIMARY_PORT, ReplicaIndex};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const INIT_SQL_TEMPLATE: &str = "init.sql.j2";
const PG_HBA_TEMPLATE: &str = "pg_hba.conf.j2";
const REPLICA_LINK_TEMPLATE: &str = "postgresql.auto.conf.j2";

/// Template environment holding the fixed set of node configuration templates.
pub struct ConfigRenderer {
    env: Environment<'static>,
}

impl ConfigRenderer {
    /// Register every embedded template.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Credentials are substituted verbatim.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::Template(format!("Non UTF-8 template path: {}", file.path().display()))
            })?;
            let source = file
                .contents_utf8()
                .ok_or_else(|| AppError::Template(format!("Template '{}' is not UTF-8", name)))?;
            env.add_template(name, source).map_err(|e| {
                AppError::Template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        Ok(Self { env })
    }

    /// SQL run once on the primary: extensions, replication user, one slot per replica.
    pub fn render_init_script(&self, config: &ClusterConfig) -> Result<String, AppError> {
        let slot_names: Vec<String> = config.replicas().map(ReplicaIndex::slot_name).collect();

        self.render(
            INIT_SQL_TEMPLATE,
            context! {
                replication_user => &config.replication_user,
                replication_password => &config.replication_password,
                slot_names => slot_names,
            },
        )
    }

    /// Primary `pg_hba.conf`. Rules are first-match-wins, so the template order is fixed.
    pub fn render_host_auth_rules(&self, config: &ClusterConfig) -> Result<String, AppError> {
        self.render(
            PG_HBA_TEMPLATE,
            context! {
                replication_user => &config.replication_user,
                replication_auth_method => AuthMethod::REPLICATION.as_str(),
                local_auth_method => config.local_auth_method.as_str(),
                pg_hba_auth_method => config.pg_hba_auth_method.as_str(),
            },
        )
    }

    /// Replica `postgresql.auto.conf` pointing at the primary and its reserved slot.
    pub fn render_replica_link_info(
        &self,
        config: &ClusterConfig,
        replica: ReplicaIndex,
    ) -> Result<String, AppError> {
        self.render(
            REPLICA_LINK_TEMPLATE,
            context! {
                primary_host => &config.primary_host,
                primary_port => PRIMARY_PORT,
                replication_user => &config.replication_user,
                replication_password => &config.replication_password,
                application_name => replica.application_name(),
                slot_name => replica.slot_name(),
            },
        )
    }

    fn render(&self, template_name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self.env.get_template(template_name).map_err(|e| {
            AppError::Template(format!("Failed to load template '{}': {}", template_name, e))
        })?;

        template.render(ctx).map_err(|e| {
            AppError::Template(format!("Failed to render template '{}': {}", template_name, e))
        })
    }
}
