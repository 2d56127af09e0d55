//! JNI backend for the activity that hosts the game.
//!
//! Views may only be touched from the UI thread, while the game loop runs on
//! its own thread. [`ActivityWindow`] is the handle the game thread holds: it
//! posts work through the `quad_immersive.UiThread` Java class
//! (`java/quad_immersive/UiThread.java`, which must be packaged in the APK),
//! and that work runs against a [`UiWindow`] on the UI thread.
//!
//! Java exceptions thrown by a call are cleared and returned as errors.

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use jni::errors::{Error, Result};
use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::sys::jlong;
use jni::{JNIEnv, JavaVM, NativeMethod};

use crate::controller::ImmersiveController;
use crate::generation::PlatformGeneration;
use crate::orientation::OrientationControl;
use crate::policy::{BarsBehavior, CutoutMode, SystemBars, SystemUiFlags};
use crate::ui_task;
use crate::window::{ImmersiveSurface, InsetsController, WindowHandle};

const UI_THREAD_CLASS: &str = "quad_immersive.UiThread";

static GENERATION: OnceLock<PlatformGeneration> = OnceLock::new();

type UiTask = Box<dyn FnOnce(&mut UiWindow<'_, '_>) + Send>;

/// Clears a pending Java exception so the thread can keep using JNI.
fn checked<T>(env: &mut JNIEnv, result: Result<T>) -> Result<T> {
    if let Err(Error::JavaException) = result {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
    result
}

extern "system" fn run_task<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
    task: jlong,
) {
    let task = unsafe { ui_task::from_handle::<UiTask>(task) };
    let mut window = UiWindow {
        env: &mut env,
        activity: &activity,
    };
    if panic::catch_unwind(AssertUnwindSafe(move || task(&mut window))).is_err() {
        log::error!("Panic in UI thread task");
    }
}

/// The game thread's handle on the current `android.app.Activity`.
pub struct ActivityWindow {
    vm: JavaVM,
    activity: GlobalRef,
    ui_thread: GlobalRef,
}

impl ActivityWindow {
    /// Wraps the activity published by the host glue, e.g. miniquad's
    /// `native::android::{attach_jni_env, ACTIVITY}`.
    ///
    /// # Safety
    ///
    /// `env` must be a valid `JNIEnv` for the calling thread and `activity` a
    /// live reference to an `android.app.Activity`.
    pub unsafe fn from_env(env: *mut jni::sys::JNIEnv, activity: jni::sys::jobject) -> Result<Self> {
        let mut env = JNIEnv::from_raw(env)?;
        let activity = JObject::from_raw(activity);
        let result = Self::attach(&mut env, &activity);
        checked(&mut env, result)
    }

    fn attach(env: &mut JNIEnv, activity: &JObject) -> Result<Self> {
        let vm = env.get_java_vm()?;

        // App classes are only visible through the activity's class loader.
        let loader = env
            .call_method(activity, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])?
            .l()?;
        let name = env.new_string(UI_THREAD_CLASS)?;
        let class: JClass = env
            .call_method(
                &loader,
                "loadClass",
                "(Ljava/lang/String;)Ljava/lang/Class;",
                &[JValue::Object(&name)],
            )?
            .l()?
            .into();
        env.register_native_methods(
            &class,
            &[NativeMethod {
                name: "runTask".into(),
                sig: "(Landroid/app/Activity;J)V".into(),
                fn_ptr: run_task as *mut c_void,
            }],
        )?;

        Ok(Self {
            vm,
            activity: env.new_global_ref(activity)?,
            ui_thread: env.new_global_ref(class)?,
        })
    }

    fn env(&self) -> Result<JNIEnv<'_>> {
        self.vm.attach_current_thread_permanently()
    }

    /// `Build.VERSION.SDK_INT`, read on first use. Falls back to the legacy
    /// path if it cannot be read.
    pub fn platform_generation(&self) -> PlatformGeneration {
        *GENERATION.get_or_init(|| {
            let sdk_int = warn_err!(self.sdk_int(), "Failed to read SDK_INT: {}");
            PlatformGeneration(sdk_int.map_or(0, |v| v.max(0) as u32))
        })
    }

    fn sdk_int(&self) -> Result<i32> {
        let mut env = self.env()?;
        let result = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .and_then(|v| v.i());
        checked(&mut env, result)
    }

    /// Queues `task` on the UI thread. Returns once it is posted, not run.
    pub fn run_on_ui_thread(
        &self,
        task: impl FnOnce(&mut UiWindow<'_, '_>) + Send + 'static,
    ) -> Result<()> {
        let mut env = self.env()?;
        let task: UiTask = Box::new(task);
        let handle = ui_task::into_handle(task);
        let class = <&JClass>::from(self.ui_thread.as_obj());
        let result = env
            .call_static_method(
                class,
                "post",
                "(Landroid/app/Activity;J)V",
                &[JValue::Object(self.activity.as_obj()), JValue::Long(handle)],
            )
            .and_then(|v| v.v());
        if result.is_err() {
            drop(unsafe { ui_task::from_handle::<UiTask>(handle) });
        }
        checked(&mut env, result)
    }
}

impl ImmersiveSurface for ActivityWindow {
    fn apply_immersive(&mut self, controller: &ImmersiveController) {
        let controller = *controller;
        warn_err!(
            self.run_on_ui_thread(move |window| controller.apply(window)),
            "Failed to post immersive mode to the UI thread: {}"
        );
    }
}

impl OrientationControl for ActivityWindow {
    type Error = Error;

    fn set_requested_orientation(&mut self, orientation: i32) -> Result<()> {
        self.run_on_ui_thread(move |window| {
            warn_err!(
                window.set_requested_orientation(orientation),
                "Failed to set requested orientation: {}"
            );
        })
    }
}

/// The activity's window, reachable only from inside a UI thread task.
pub struct UiWindow<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
}

impl<'local> UiWindow<'_, 'local> {
    fn call<T>(&mut self, f: impl FnOnce(&mut JNIEnv<'local>) -> Result<T>) -> Result<T> {
        let result = f(self.env);
        checked(self.env, result)
    }

    fn window(&mut self) -> Result<JObject<'local>> {
        let activity = self.activity;
        let window = self.call(|env| {
            env.call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?
                .l()
        })?;
        if window.is_null() {
            return Err(Error::NullPtr("Activity.getWindow"));
        }
        Ok(window)
    }
}

impl<'local> WindowHandle for UiWindow<'_, 'local> {
    type Error = Error;
    type Insets<'s> = UiInsets<'s, 'local> where Self: 's;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()> {
        let window = self.window()?;
        self.call(|env| {
            env.call_method(
                &window,
                "setDecorFitsSystemWindows",
                "(Z)V",
                &[JValue::Bool(u8::from(fits))],
            )?
            .v()
        })
    }

    fn set_cutout_mode(&mut self, mode: CutoutMode) -> Result<()> {
        let window = self.window()?;
        self.call(|env| {
            let attrs = env
                .call_method(
                    &window,
                    "getAttributes",
                    "()Landroid/view/WindowManager$LayoutParams;",
                    &[],
                )?
                .l()?;
            env.set_field(
                &attrs,
                "layoutInDisplayCutoutMode",
                "I",
                JValue::Int(mode.value()),
            )?;
            env.call_method(
                &window,
                "setAttributes",
                "(Landroid/view/WindowManager$LayoutParams;)V",
                &[JValue::Object(&attrs)],
            )?
            .v()
        })
    }

    fn insets_controller(&mut self) -> Result<Option<UiInsets<'_, 'local>>> {
        let window = self.window()?;
        let controller = self.call(|env| {
            env.call_method(
                &window,
                "getInsetsController",
                "()Landroid/view/WindowInsetsController;",
                &[],
            )?
            .l()
        })?;
        if controller.is_null() {
            return Ok(None);
        }
        Ok(Some(UiInsets {
            env: &mut *self.env,
            controller,
        }))
    }

    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()> {
        let window = self.window()?;
        self.call(|env| {
            let decor = env
                .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])?
                .l()?;
            env.call_method(
                &decor,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int(flags.bits())],
            )?
            .v()
        })
    }
}

impl OrientationControl for UiWindow<'_, '_> {
    type Error = Error;

    fn set_requested_orientation(&mut self, orientation: i32) -> Result<()> {
        let activity = self.activity;
        self.call(|env| {
            env.call_method(
                activity,
                "setRequestedOrientation",
                "(I)V",
                &[JValue::Int(orientation)],
            )?
            .v()
        })
    }
}

/// `android.view.WindowInsetsController` of a [`UiWindow`].
pub struct UiInsets<'s, 'local> {
    env: &'s mut JNIEnv<'local>,
    controller: JObject<'local>,
}

impl UiInsets<'_, '_> {
    fn call(&mut self, name: &str, arg: i32) -> Result<()> {
        let result = self
            .env
            .call_method(&self.controller, name, "(I)V", &[JValue::Int(arg)])
            .and_then(|v| v.v());
        checked(self.env, result)
    }
}

impl InsetsController for UiInsets<'_, '_> {
    type Error = Error;

    fn hide(&mut self, bars: SystemBars) -> Result<()> {
        self.call("hide", bars.mask())
    }

    fn set_system_bars_behavior(&mut self, behavior: BarsBehavior) -> Result<()> {
        self.call("setSystemBarsBehavior", behavior.value())
    }
}
