//! Bridge to the Pyodide runtime loaded by `index.html`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `loadPyodide` is a page global. Each Python panel loads its own runtime,
//! installs the stream capture prelude, runs the user code, and reads both
//! captured streams back. Outside the `csr` build loading always fails.

use transcript::sandbox::PythonOutput;

pub const INDEX_URL: &str = "https://cdn.jsdelivr.net/pyodide/v0.25.1/full/";

#[cfg(feature = "csr")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = loadPyodide, catch)]
        pub fn load_pyodide(options: &JsValue) -> Result<js_sys::Promise, JsValue>;

        #[derive(Clone)]
        pub type PyodideHandle;

        #[wasm_bindgen(method, js_name = loadPackagesFromImports, catch)]
        pub fn load_packages_from_imports(this: &PyodideHandle, code: &str) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(method, js_name = runPython, catch)]
        pub fn run_python(this: &PyodideHandle, code: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, js_name = runPythonAsync, catch)]
        pub fn run_python_async(this: &PyodideHandle, code: &str) -> Result<js_sys::Promise, JsValue>;
    }
}

/// A loaded interpreter.
#[derive(Clone)]
pub struct Pyodide {
    #[cfg(feature = "csr")]
    handle: ffi::PyodideHandle,
}

impl Pyodide {
    /// Boot a runtime from [`INDEX_URL`].
    ///
    /// # Errors
    ///
    /// Returns the JS error text when the global is missing or loading fails.
    pub async fn load() -> Result<Self, String> {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let options = js_sys::Object::new();
            js_sys::Reflect::set(&options, &"indexURL".into(), &INDEX_URL.into()).map_err(js_error)?;
            let promise = ffi::load_pyodide(&options).map_err(js_error)?;
            let handle = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(js_error)?;
            Ok(Self { handle: handle.unchecked_into() })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("Pyodide requires a browser".to_owned())
        }
    }

    /// Run `code` with stdout and stderr captured.
    ///
    /// # Errors
    ///
    /// Returns the exception message when the code raises.
    pub async fn run(&self, code: &str) -> Result<PythonOutput, String> {
        #[cfg(feature = "csr")]
        {
            use transcript::sandbox::python::{CAPTURE_PRELUDE, READ_STDERR, READ_STDOUT};
            use wasm_bindgen_futures::JsFuture;

            let packages = self.handle.load_packages_from_imports(code).map_err(js_error)?;
            JsFuture::from(packages).await.map_err(js_error)?;
            self.handle.run_python(CAPTURE_PRELUDE).map_err(js_error)?;
            let run = self.handle.run_python_async(code).map_err(js_error)?;
            JsFuture::from(run).await.map_err(js_error)?;

            let stdout = self.handle.run_python(READ_STDOUT).map_err(js_error)?;
            let stderr = self.handle.run_python(READ_STDERR).map_err(js_error)?;
            Ok(PythonOutput {
                stdout: stdout.as_string().unwrap_or_default(),
                stderr: stderr.as_string().unwrap_or_default(),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = code;
            Err("Pyodide requires a browser".to_owned())
        }
    }
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
