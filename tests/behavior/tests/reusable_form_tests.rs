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

use behavior_tests::Testkit;
use behavior_tests::harness;
use hellosign_client::ErrorKind;
use hellosign_client::Member;
use test_harness::test;

#[test(harness)]
async fn test_list_and_show(testkit: Testkit) {
    let forms = testkit.hellosign.reusable_form().unwrap();

    let list = forms.list(1).await.unwrap();
    assert_eq!(list["reusable_forms"][0]["reusable_form_id"], "form-1");

    let form = forms.show("form-1").await.unwrap();
    assert_eq!(form["reusable_form"]["reusable_form_id"], "form-1");
}

#[test(harness)]
async fn test_show_errors(testkit: Testkit) {
    let forms = testkit.hellosign.reusable_form().unwrap();
    assert_eq!(
        forms.show("private").await.unwrap_err().kind(),
        ErrorKind::Forbidden
    );
    assert_eq!(
        forms.show("missing").await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test(harness)]
async fn test_access(testkit: Testkit) {
    let forms = testkit.hellosign.reusable_form().unwrap();
    let member = Member::EmailAddress("jack@example.com".to_string());

    let granted = forms.grant_access("form-1", &member).await.unwrap();
    assert_eq!(
        granted["reusable_form"]["accounts"][0]["email_address"],
        "jack@example.com"
    );

    let revoked = forms.revoke_access("form-1", &member).await.unwrap();
    assert_eq!(
        revoked["reusable_form"]["removed"]["email_address"],
        "jack@example.com"
    );
}

#[test(harness)]
async fn test_show_id_is_not_a_route(testkit: Testkit) {
    let forms = testkit.hellosign.reusable_form().unwrap();
    let shown = forms.show("list?page=1").await.unwrap();
    assert!(shown["reusable_form"].is_object());
    assert!(shown.get("reusable_forms").is_none());
}
