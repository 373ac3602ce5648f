//! User storage: the `user_credentials.json` array.

use crate::model::UserCredentials;

use super::{Result, Storage, USERS_FILE, UserRepository};

impl UserRepository for Storage {
    fn all_users(&self) -> Vec<UserCredentials> {
        self.read_array_lenient(USERS_FILE)
    }

    fn append_user(&self, user: &UserCredentials) -> Result<()> {
        let _guard = self.lock()?;
        let mut users: Vec<UserCredentials> = self.read_array(USERS_FILE)?;
        users.push(user.clone());
        self.write_array(USERS_FILE, &users)
    }
}
