// Copyright 2025 ScopeDB <contact@scopedb.io>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


pub use self::service::FAKE_ACCOUNT_ID;
pub use self::service::FAKE_EMAIL;
pub use self::service::FAKE_PASSWORD;
pub use self::service::FAKE_PDF;
pub use self::service::FakeServiceState;
pub use self::service::start_fake_service;

pub fn make_test_name<TestFn>() -> String {
    let replacer = regex::Regex::new(r"[^a-zA-Z0-9]").unwrap();
    let test_name = std::any::type_name::<TestFn>()
        .rsplit("::")
        .find(|part| *part != "{{closure}}")
        .unwrap();
    replacer.replace_all(test_name, "_").to_string()
}

pub fn init_logs() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    // try_apply returns err if already set; ignored
    let _ = logforth::builder()
        .dispatch(|d| d.filter(filter).append(logforth::append::Stderr::default()))
        .try_apply();
}
