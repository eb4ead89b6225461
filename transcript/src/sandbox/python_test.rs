use super::*;

fn output(stdout: &str, stderr: &str) -> PythonOutput {
    PythonOutput { stdout: stdout.to_owned(), stderr: stderr.to_owned() }
}

#[test]
fn new_run_is_loading_and_cannot_start() {
    let mut run = PythonRun::new();
    assert_eq!(run.phase(), PythonPhase::Loading);
    assert_eq!(run.status_text(), Some(LOADING_TEXT));
    assert!(!run.start());
    assert_eq!(run.phase(), PythonPhase::Loading);
}

#[test]
fn runtime_loaded_starts_first_run() {
    let mut run = PythonRun::new();
    assert!(run.runtime_loaded());
    assert_eq!(run.phase(), PythonPhase::Executing);
    assert_eq!(run.button_label(), "Executando...");
    assert!(!run.runtime_loaded());
}

#[test]
fn start_is_refused_while_executing() {
    let mut run = PythonRun::new();
    run.runtime_loaded();
    assert!(!run.start());
}

#[test]
fn finish_keeps_streams_separate() {
    let mut run = PythonRun::new();
    run.runtime_loaded();
    run.finish(Ok(output("ok\n", "aviso\n")));
    assert_eq!(run.phase(), PythonPhase::Finished);
    assert_eq!(run.output(), &output("ok\n", "aviso\n"));
    assert_eq!(run.status_text(), None);
    assert_eq!(run.button_label(), "Executar");
}

#[test]
fn exception_is_reported_as_stderr() {
    let mut run = PythonRun::new();
    run.runtime_loaded();
    run.finish(Err("NameError: x".to_owned()));
    assert_eq!(run.output(), &output("", "NameError: x"));
}

#[test]
fn empty_run_shows_no_output_text() {
    let mut run = PythonRun::new();
    run.runtime_loaded();
    run.finish(Ok(PythonOutput::default()));
    assert_eq!(run.status_text(), Some(NO_OUTPUT_TEXT));
}

#[test]
fn rerun_clears_previous_output() {
    let mut run = PythonRun::new();
    run.runtime_loaded();
    run.finish(Ok(output("1", "")));
    assert!(run.start());
    assert_eq!(run.output(), &PythonOutput::default());
}

#[test]
fn load_failure_disables_running() {
    let mut run = PythonRun::new();
    run.runtime_failed();
    assert_eq!(run.phase(), PythonPhase::LoadFailed);
    assert_eq!(run.output().stderr, LOAD_FAILED_TEXT);
    assert!(!run.can_run());
    assert!(!run.start());
}

#[test]
fn finish_outside_execution_is_ignored() {
    let mut run = PythonRun::new();
    run.finish(Ok(output("x", "")));
    assert_eq!(run.phase(), PythonPhase::Loading);
}
