use assert_cmd::Command;

fn ctl() -> Command {
    let mut cmd = Command::cargo_bin("jobopts-ctl").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_endpoint_fails_with_hint() {
    let output = ctl().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Use --endpoint=<endpoint>"),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn prints_resolved_options_as_json() {
    let output = ctl()
        .env("USER", "erin")
        .args([
            "--endpoint=localhost:8099",
            "--job_name=wordcount",
            "--experiments=a,,b",
            "--async",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["endpoint"], "localhost:8099");
    assert_eq!(json["job_name"], "wordcount");
    assert_eq!(
        json["container_image"],
        "erin-docker-apache.bintray.io/beam/go:latest"
    );
    assert_eq!(json["experiments"], serde_json::json!(["a", "", "b"]));
    assert_eq!(json["async"], true);
    assert!(json.get("internal_java_runner").is_none());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No container image specified"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn explicit_image_is_not_announced() {
    let output = ctl()
        .args([
            "--endpoint=localhost:8099",
            "--container_image=worker:1",
            "--async=false",
            "--pretty",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["container_image"], "worker:1");
    assert!(json["job_name"].as_str().unwrap().starts_with("go-job-"));
    assert!(json["experiments"].as_array().unwrap().is_empty());
    assert_eq!(json["async"], false);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("No container image specified"));
}
