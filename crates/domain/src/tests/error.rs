// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidLineCapacity(5);
    assert_eq!(format!("{err}"), "Invalid line capacity: 5. Must be 3 or 4");

    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidTeam(String::from("VISITOR"));
    assert_eq!(format!("{err}"), "Invalid team: 'VISITOR'");
}
