//! Bookmark Tools address server — JSON over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "address":"/imported/bookmarks.sqlite/1/children"}
//! Response: {"id":1, "result":[...]} or {"id":1, "error":{"kind":...,"status":...,"message":...}}
//!
//! Authentication is the transport owner's problem: whoever feeds this
//! loop has already authenticated the caller.

use std::io::{self, BufRead, Write};

use bookmark_tools::app::App;
use bookmark_tools::imported::resource::ImportedResource;

use serde_json::{json, Value};

fn main() {
    let upload_dir = if let Ok(dir) = std::env::var("BOOKMARK_TOOLS_UPLOAD_DIR") {
        std::path::PathBuf::from(dir)
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent()
            .unwrap_or(std::path::Path::new("."))
            .join("imported_files")
    } else {
        std::path::PathBuf::from("imported_files")
    };
    let app = App::new(upload_dir);

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().ok();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}", e)});
                println!("{}", err);
                io::stdout().flush().ok();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let address = req.get("address").and_then(|v| v.as_str()).unwrap_or("");

        let response = match app.resource.get_path(address) {
            Ok(result) => json!({"id": id, "result": result}),
            Err(err) => {
                // Contract violations and internal failures are loud;
                // routine not-found/bad-request traffic is not.
                if err.status() == 500 {
                    eprintln!("address {} failed: {}", address, err);
                }
                json!({"id": id, "error": ImportedResource::error_body(&err)})
            }
        };
        println!("{}", response);
        io::stdout().flush().ok();
    }
}
