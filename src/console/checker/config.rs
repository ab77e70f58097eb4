//! Fixed configuration for the diagnostic: every check the tool runs is a
//! record in one of these tables, so adding or removing a check never
//! touches the execution logic in [`super::service`].
use std::time::Duration;

use crate::console::report::Status;

pub const SUBPROCESS_TIMEOUT: Duration = Duration::from_secs(5);
pub const PORT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Interpreter of the ML tier. Its absence is the only fatal condition.
pub const PYTHON: &str = "python3";

/// A `--version` subprocess probe.
pub struct RuntimeProbe {
    pub program: &'static str,
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

#[must_use]
pub fn companion_runtimes() -> Vec<RuntimeProbe> {
    vec![
        RuntimeProbe {
            program: "node",
            label: "Node.js",
            hint: Some("Install from https://nodejs.org"),
        },
        RuntimeProbe {
            program: "npm",
            label: "npm",
            hint: None,
        },
    ]
}

/// A Python importability probe. `import_name` is what the interpreter
/// imports, `dist_name` is what pip installs (they differ for
/// scikit-learn).
#[derive(Debug, Clone, Copy)]
pub struct PackageProbe {
    pub import_name: &'static str,
    pub dist_name: &'static str,
}

#[must_use]
pub fn required_packages() -> Vec<PackageProbe> {
    vec![
        PackageProbe {
            import_name: "flask",
            dist_name: "flask",
        },
        PackageProbe {
            import_name: "numpy",
            dist_name: "numpy",
        },
        PackageProbe {
            import_name: "sklearn",
            dist_name: "scikit-learn",
        },
    ]
}

pub const ML_SERVICE_DIR: &str = "Crop-Recommendation-System-Using-Machine-Learning";

pub const PIP_INSTALL_HINT: &str = "pip install -r requirements.txt";

/// A file-existence probe relative to its group's base directory.
pub struct FileProbe {
    pub path: &'static str,
    pub label: &'static str,
    /// Severity reported when the file is absent (`Fail` or `Warn`).
    pub when_missing: Status,
    /// Extra remediation text appended when the file is absent.
    pub hint: Option<&'static str>,
}

pub struct FileGroup {
    pub title: &'static str,
    pub base_dir: &'static str,
    pub files: Vec<FileProbe>,
}

#[must_use]
pub fn file_groups() -> Vec<FileGroup> {
    vec![
        FileGroup {
            title: "ML API Files Check",
            base_dir: ML_SERVICE_DIR,
            files: vec![
                required_file("ml_api.py", "Flask server"),
                required_file("model.pkl", "ML model"),
                required_file("minmaxscaler.pkl", "Min-Max scaler"),
                required_file("standscaler.pkl", "Standard scaler"),
                required_file("requirements.txt", "Dependencies"),
            ],
        },
        FileGroup {
            title: "Backend Files Check",
            base_dir: "backend",
            files: vec![
                optional_file("server.js", "Express server"),
                optional_file("package.json", "Dependencies"),
                optional_file(".env", "Configuration"),
            ],
        },
        FileGroup {
            title: "Frontend Files Check",
            base_dir: "frontend",
            files: vec![
                required_file("package.json", "Dependencies"),
                required_file("src/pages/CropRecommendation.tsx", "Main page"),
                FileProbe {
                    path: "dist/index.html",
                    label: "Built frontend (needed for production)",
                    when_missing: Status::Warn,
                    hint: Some("Build needed: npm run build"),
                },
            ],
        },
    ]
}

fn required_file(path: &'static str, label: &'static str) -> FileProbe {
    FileProbe {
        path,
        label,
        when_missing: Status::Fail,
        hint: None,
    }
}

fn optional_file(path: &'static str, label: &'static str) -> FileProbe {
    FileProbe {
        path,
        label,
        when_missing: Status::Warn,
        hint: Some("Optional or missing"),
    }
}

/// A loopback TCP connect target.
pub struct PortProbe {
    pub port: u16,
    pub service: &'static str,
}

#[must_use]
pub fn ports_to_check() -> Vec<PortProbe> {
    vec![
        PortProbe {
            port: 5001,
            service: "ML API (Python)",
        },
        PortProbe {
            port: 5000,
            service: "Backend (Node.js)",
        },
    ]
}

/// Static setup and troubleshooting text printed near the end of a run.
pub const RECOMMENDATIONS: &str = r"
If you haven't started the system yet:

Option 1 (Easiest - Windows):
  1. Double-click: START_ALL.bat

Option 2 (PowerShell):
  1. Run: .\START_ALL.ps1

Option 3 (Manual - 3 terminals):
  Terminal 1: cd Crop-Recommendation-System-Using-Machine-Learning && python ml_api.py
  Terminal 2: cd backend && npm install && npm start
  Terminal 3: Open http://localhost:5000 in browser

If services aren't responding:

1. ML API issues:
   → cd Crop-Recommendation-System-Using-Machine-Learning
   → pip install -r requirements.txt
   → python ml_api.py

2. Backend issues:
   → cd backend
   → npm install
   → npm start

3. Port conflicts:
   → Check: netstat -ano | findstr :5000 (or :5001)
   → Kill process if needed
   → Or change PORT in backend/.env

4. Frontend issues:
   → cd frontend
   → npm install
   → npm run build
   → Then backend will serve it at http://localhost:5000
";
