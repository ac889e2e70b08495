//! Type-erased failure value.

use core::any::type_name;
use core::fmt;
use std::error::Error as StdError;

use smallvec::SmallVec;

// ============================================================
// Failure
// ============================================================

/// Type-erased error carried through every combinator.
///
/// `Failure` boxes the concrete error once, when it first crosses into a
/// combinator, and is only ever moved afterwards. The boxed error keeps its
/// concrete type (for typed catches via [`Narrow`](crate::Narrow)) and its
/// `source()` chain.
///
/// `Failure` does NOT implement `std::error::Error`. That keeps the blanket
/// `From<E: Error>` impl from colliding with `From<T> for T`, so `?` inside an
/// operation converts any error while a `Failure` passes through untouched.
/// Code that expects a standard error gets one through
/// `From<Failure> for Box<dyn Error + Send + Sync>`, which `?` applies on its
/// own and which keeps the original allocation.
///
/// # Examples
///
/// ```
/// use catch_this::Failure;
/// use std::io;
///
/// let failure = Failure::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
/// assert!(failure.is::<io::Error>());
/// assert_eq!(failure.to_string(), "missing");
/// ```
pub struct Failure {
    source: Box<dyn StdError + Send + Sync + 'static>,
    /// Type name of the concrete error, recorded at construction.
    kind: &'static str,
}

/// Identity of a [`Failure`]: the address of its boxed error.
///
/// Stable for as long as the failure lives, no matter how often it is moved.
/// Zero-sized error types are never allocated, so all of them share one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FailureId(usize);

impl Failure {
    /// Box any error.
    #[inline]
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self {
            source: Box::new(error),
            kind: type_name::<E>(),
        }
    }

    /// Adopt an already boxed error without re-boxing it.
    ///
    /// The concrete type is not known statically here, so [`kind`](Self::kind)
    /// reports the trait object type.
    #[inline]
    pub fn from_box(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            source: error,
            kind: type_name::<Box<dyn StdError + Send + Sync>>(),
        }
    }

    /// Create a failure from a plain message.
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Type name of the error this failure was created from.
    ///
    /// A failure built with [`from_box`](Self::from_box) only knows the trait
    /// object it was given, so its kind is the name of
    /// `Box<dyn Error + Send + Sync>`, not of the error inside. Use
    /// [`is`](Self::is) or [`downcast_ref`](Self::downcast_ref) to test the
    /// concrete type in that case.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Identity of this failure instance.
    pub fn id(&self) -> FailureId {
        let ptr: *const (dyn StdError + Send + Sync) = &*self.source;
        FailureId(ptr as *const () as usize)
    }

    /// Whether the root error is a `T`.
    #[inline]
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.source.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.source.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: StdError + 'static>(&mut self) -> Option<&mut T> {
        self.source.downcast_mut::<T>()
    }

    /// Take the root error out as a `T`.
    ///
    /// On mismatch the very same failure is handed back, so a caller that
    /// propagates it preserves its [`id`](Self::id) and [`kind`](Self::kind).
    #[inline]
    pub fn downcast<T: StdError + 'static>(self) -> Result<T, Self> {
        let Self { source, kind } = self;
        match source.downcast::<T>() {
            Ok(error) => Ok(*error),
            Err(source) => Err(Self { source, kind }),
        }
    }

    /// The root error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Give up the wrapper and return the boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }

    /// Iterate over the root error followed by its `source()` chain.
    pub fn chain(&self) -> Chain<'_> {
        let root: &(dyn StdError + 'static) = &*self.source;
        Chain { next: Some(root) }
    }

    /// The last error in the cause chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        // chain() always yields at least the root error
        let mut last: &(dyn StdError + 'static) = &*self.source;
        for error in self.chain() {
            last = error;
        }
        last
    }

    /// Find the first error of type `T` in the cause chain.
    ///
    /// # Example
    ///
    /// ```
    /// use catch_this::Failure;
    /// use std::io;
    ///
    /// fn report(failure: &Failure) {
    ///     if let Some(io) = failure.chain_any::<io::Error>() {
    ///         println!("io failure somewhere in the chain: {:?}", io.kind());
    ///     }
    /// }
    /// ```
    pub fn chain_any<T: StdError + 'static>(&self) -> Option<&T> {
        self.chain().find_map(|error| error.downcast_ref::<T>())
    }

    /// Collect every error of type `T` in the cause chain.
    pub fn chain_all<T: StdError + 'static>(&self) -> SmallVec<[&T; 4]> {
        self.chain()
            .filter_map(|error| error.downcast_ref::<T>())
            .collect()
    }

    /// Snapshot of this failure for logs and serialization.
    pub fn report(&self) -> Report {
        Report {
            kind: self.kind.to_string(),
            message: self.source.to_string(),
            causes: self.chain().skip(1).map(|e| e.to_string()).collect(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

// Enables `?` on any error inside an operation.
// Doesn't conflict with From<T> for T because Failure doesn't implement Error.
impl<E: StdError + Send + Sync + 'static> From<E> for Failure {
    #[inline]
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}

// ============================================================
// Chain iterator
// ============================================================

/// Iterator over a failure's cause chain, root first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone().map(|e| e.to_string())).finish()
    }
}

// ============================================================
// Message helper
// ============================================================

/// Error created by [`Failure::msg`].
#[derive(Debug)]
pub struct Message(pub(crate) String);

impl Message {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

// ============================================================
// Conversions
// ============================================================

// Hands the boxed error back unchanged, so the box address (and id) survives.
impl From<Failure> for Box<dyn StdError + Send + Sync + 'static> {
    #[inline]
    fn from(failure: Failure) -> Self {
        failure.into_inner()
    }
}

impl From<Failure> for Box<dyn StdError + 'static> {
    #[inline]
    fn from(failure: Failure) -> Self {
        failure.into_inner()
    }
}

// ============================================================
// Report
// ============================================================

/// Owned description of a failure: its kind, message and cause messages.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub kind: String,
    pub message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub causes: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.causes {
            write!(f, "\n    \u{2192} {}", cause)?;
        }
        Ok(())
    }
}
