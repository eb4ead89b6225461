//! Run state of one Python panel.
//!
//! The interpreter boots asynchronously and on its own schedule. Until it
//! reports ready, the panel's run button stays disabled; the chat is never
//! blocked by it. The first run starts automatically once loading ends.

#[cfg(test)]
#[path = "python_test.rs"]
mod python_test;

/// Redirects the interpreter's streams before user code runs.
pub const CAPTURE_PRELUDE: &str = "import sys\nimport io\nsys.stdout = io.StringIO()\nsys.stderr = io.StringIO()\n";
/// Reads captured standard output after a run.
pub const READ_STDOUT: &str = "sys.stdout.getvalue()";
/// Reads captured standard error after a run.
pub const READ_STDERR: &str = "sys.stderr.getvalue()";

pub const LOADING_TEXT: &str = "Carregando ambiente Python...";
pub const LOAD_FAILED_TEXT: &str = "Falha ao carregar o ambiente Python. Verifique a conexão com a internet.";
pub const NO_OUTPUT_TEXT: &str = "A execução não produziu nenhuma saída.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PythonPhase {
    /// Interpreter still booting.
    Loading,
    /// Interpreter could not be loaded; nothing can run.
    LoadFailed,
    /// Interpreter ready, nothing run yet.
    Ready,
    Executing,
    Finished,
}

/// Captured streams of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PythonOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PythonRun {
    phase: PythonPhase,
    output: PythonOutput,
}

impl Default for PythonRun {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonRun {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: PythonPhase::Loading, output: PythonOutput::default() }
    }

    #[must_use]
    pub fn phase(&self) -> PythonPhase {
        self.phase
    }

    #[must_use]
    pub fn output(&self) -> &PythonOutput {
        &self.output
    }

    /// Interpreter finished booting. Returns `true` when the caller should
    /// start the automatic first run.
    pub fn runtime_loaded(&mut self) -> bool {
        if self.phase != PythonPhase::Loading {
            return false;
        }
        self.phase = PythonPhase::Ready;
        self.start()
    }

    pub fn runtime_failed(&mut self) {
        self.phase = PythonPhase::LoadFailed;
        self.output = PythonOutput { stdout: String::new(), stderr: LOAD_FAILED_TEXT.to_owned() };
    }

    #[must_use]
    pub fn can_run(&self) -> bool {
        matches!(self.phase, PythonPhase::Ready | PythonPhase::Finished)
    }

    /// Enter the executing phase and clear previous output.
    ///
    /// Returns `false`, changing nothing, while loading or already executing.
    pub fn start(&mut self) -> bool {
        if !self.can_run() {
            return false;
        }
        self.phase = PythonPhase::Executing;
        self.output = PythonOutput::default();
        true
    }

    /// Record the outcome of a run. An `Err` is an exception message raised
    /// outside the captured streams and is shown as standard error.
    pub fn finish(&mut self, result: Result<PythonOutput, String>) {
        if self.phase != PythonPhase::Executing {
            return;
        }
        self.output = match result {
            Ok(output) => output,
            Err(message) => PythonOutput { stdout: String::new(), stderr: message },
        };
        self.phase = PythonPhase::Finished;
    }

    /// Placeholder text for the output area, if any applies.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        match self.phase {
            PythonPhase::Loading => Some(LOADING_TEXT),
            PythonPhase::Finished if self.output.stdout.is_empty() && self.output.stderr.is_empty() => {
                Some(NO_OUTPUT_TEXT)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.phase == PythonPhase::Executing { "Executando..." } else { "Executar" }
    }
}
