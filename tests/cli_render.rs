mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn render_init_sql_prints_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "init-sql"])
        .env("REPLICATION_USER", "repl")
        .env("REPLICATION_PASSWORD", "secret")
        .env("REPLICATION_COUNT", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE USER repl WITH REPLICATION PASSWORD 'secret' LOGIN;"))
        .stdout(predicate::str::contains("replica_slot_slave1"))
        .stdout(predicate::str::contains("replica_slot_slave2").not());

    ctx.assert_not_exists("master");
}

#[test]
fn render_replica_uses_primary_host() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "replica", "--index", "2"])
        .env("REPLICATION_USER", "repl")
        .env("REPLICATION_PASSWORD", "secret")
        .env("PRIMARY_HOST", "db-primary")
        .assert()
        .success()
        .stdout(predicate::eq(
            "primary_conninfo = 'host=db-primary port=5432 user=repl password=secret application_name=slave2'\n\
             primary_slot_name = 'replica_slot_slave2'\n",
        ));
}

#[test]
fn render_pg_hba_reads_env_file_flag() {
    let ctx = TestContext::new();
    std::fs::write(ctx.path("cluster.env"), "REPLICATION_USER=repl\nPG_HBA_AUTH_METHOD=cert\n").unwrap();

    ctx.cli()
        .args(["render", "pg-hba", "--env-file", "cluster.env"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("host all all all cert\n"));
}

#[test]
fn render_replica_rejects_index_zero() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "replica", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("replicas are numbered from 1"));
}
