use jni::objects::{JObject, JObjectArray, JString, JValue};

use super::{AssetListing, ListError};

/// Listing over the apk asset store.
///
/// Goes through the Java-side `AssetManager.list` rather than the NDK's
/// `AAssetDir_getNextFileName`: the NDK call enumerates files only and
/// returns a valid handle even for nonexistent paths, while the Java call
/// yields subdirectory names too and throws for unlistable paths.
#[derive(Default, Debug)]
pub struct AndroidAssetListing;

fn store_error(path: &str, error: jni::errors::Error) -> ListError {
    ListError::Io {
        path: path.to_owned(),
        source: std::io::Error::new(std::io::ErrorKind::Other, error),
    }
}

impl AssetListing for AndroidAssetListing {
    fn list(&self, path: &str) -> Result<Vec<String>, ListError> {
        let native_activity = ndk_glue::native_activity();

        let vm = unsafe { jni::JavaVM::from_raw(native_activity.vm().cast()) }
            .map_err(|error| store_error(path, error))?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|error| store_error(path, error))?;

        let activity = unsafe { JObject::from_raw(native_activity.activity()) };
        let asset_manager = env
            .call_method(
                &activity,
                "getAssets",
                "()Landroid/content/res/AssetManager;",
                &[],
            )
            .and_then(|value| value.l())
            .map_err(|error| store_error(path, error))?;

        let j_path: JObject = env
            .new_string(path)
            .map_err(|error| store_error(path, error))?
            .into();
        let names = env
            .call_method(
                &asset_manager,
                "list",
                "(Ljava/lang/String;)[Ljava/lang/String;",
                &[JValue::Object(&j_path)],
            )
            .and_then(|value| value.l());
        let names = match names {
            Ok(names) => JObjectArray::from(names),
            Err(_) => {
                // AssetManager.list raises IOException for unlistable paths.
                let _ = env.exception_clear();
                return Err(ListError::NotFound(path.to_owned()));
            }
        };

        let count = env
            .get_array_length(&names)
            .map_err(|error| store_error(path, error))?;
        let mut children = Vec::with_capacity(count as usize);
        for index in 0..count {
            let name = env
                .get_object_array_element(&names, index)
                .map_err(|error| store_error(path, error))?;
            let name: String = env
                .get_string(&JString::from(name))
                .map_err(|error| store_error(path, error))?
                .into();
            children.push(name);
        }

        Ok(children)
    }
}
