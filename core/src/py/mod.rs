use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Serialize;
use serde_json::{self as json, Value};
use serde_path_to_error as spte;

use crate::models::{format_date, parse_date, SubmitRequest};
use crate::plan::{nutrition_items, quick_tips, weekly_plan};
use crate::tracker::WorkoutTracker;
use crate::TrackerError;

fn py_err(e: TrackerError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_json<T: Serialize>(v: &T) -> PyResult<String> {
    json::to_string(v).map_err(|e| PyValueError::new_err(format!("serialize error: {e}")))
}

// ──────────────────────────────────────────────────────────────────────────────
// WorkoutTracker for presentasjonslaget (tkinter o.l.). Alle svar er JSON.
// ──────────────────────────────────────────────────────────────────────────────

#[pyclass(name = "WorkoutTracker", unsendable)]
pub struct PyWorkoutTracker {
    inner: WorkoutTracker,
}

#[pymethods]
impl PyWorkoutTracker {
    #[new]
    fn new() -> PyResult<Self> {
        Ok(Self { inner: WorkoutTracker::new().map_err(py_err)? })
    }

    #[pyo3(signature = (distance_km, duration_min, weight_kg, target_km=None))]
    fn submit(
        &mut self,
        distance_km: f64,
        duration_min: f64,
        weight_kg: f64,
        target_km: Option<f64>,
    ) -> PyResult<String> {
        let entry = self
            .inner
            .submit(distance_km, duration_min, weight_kg, target_km)
            .map_err(py_err)?;
        to_json(&entry)
    }

    /// Rå tekstfelt fra skjemaet, tomt mål = ingen mål.
    #[pyo3(signature = (distance, duration, weight, target=""))]
    fn submit_text(
        &mut self,
        distance: &str,
        duration: &str,
        weight: &str,
        target: &str,
    ) -> PyResult<String> {
        let req = SubmitRequest::parse(distance, duration, weight, target).map_err(py_err)?;
        let entry = self.inner.submit_request(&req).map_err(py_err)?;
        to_json(&entry)
    }

    fn submit_json(&mut self, json_in: &str) -> PyResult<String> {
        let mut de = json::Deserializer::from_str(json_in);
        let req: SubmitRequest = spte::deserialize(&mut de).map_err(|e| {
            let path = e.path().to_string();
            PyValueError::new_err(format!("parse error (SubmitRequest) at {}: {}", path, e))
        })?;
        let entry = self.inner.submit_request(&req).map_err(py_err)?;
        to_json(&entry)
    }

    fn progress_for_date(&self, date: &str) -> PyResult<String> {
        let d = parse_date(date).map_err(py_err)?;
        let p = self.inner.progress_for_date(d);
        let mut v = json::to_value(p).map_err(|e| PyValueError::new_err(e.to_string()))?;
        if let Value::Object(m) = &mut v {
            m.insert("excess_km".into(), json::json!(p.excess_km()));
        }
        Ok(v.to_string())
    }

    fn progress_today(&self) -> PyResult<String> {
        to_json(&self.inner.progress_today())
    }

    fn entries_for_date(&self, date: &str) -> PyResult<String> {
        let d = parse_date(date).map_err(py_err)?;
        to_json(&self.inner.entries_for_date(d))
    }

    fn record_for_date(&self, date: &str) -> PyResult<Option<String>> {
        let d = parse_date(date).map_err(py_err)?;
        self.inner.record_for_date(d).map(to_json).transpose()
    }

    fn day_summary(&self, date: &str) -> PyResult<Vec<String>> {
        let d = parse_date(date).map_err(py_err)?;
        Ok(self.inner.day_summary(d))
    }

    fn dates(&self) -> Vec<String> {
        self.inner.dates().into_iter().map(format_date).collect()
    }

    fn latest(&self) -> PyResult<Option<String>> {
        self.inner.latest().map(to_json).transpose()
    }

    fn metrics_text(&self) -> PyResult<String> {
        self.inner.telemetry().gather_text().map_err(py_err)
    }
}

#[pyfunction]
fn weekly_plan_json() -> PyResult<String> {
    to_json(weekly_plan())
}

#[pyfunction]
fn nutrition_json() -> PyResult<String> {
    to_json(&json::json!({
        "items": nutrition_items(),
        "tips": quick_tips(),
    }))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn runtracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyWorkoutTracker>()?;
    m.add_function(wrap_pyfunction!(weekly_plan_json, m)?)?;
    m.add_function(wrap_pyfunction!(nutrition_json, m)?)?;
    Ok(())
}
