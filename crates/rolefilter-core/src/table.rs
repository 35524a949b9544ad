use indexmap::IndexMap;
use serde::Serialize;

/// Ordered status → steps mapping for one role. Iteration order is
/// declaration order, which the resolver's output order depends on.
pub type StatusStepMap = IndexMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// Helper macro for concise table declarations
// ---------------------------------------------------------------------------

macro_rules! statuses {
    ( $( $status:expr => [ $( $step:expr ),+ $(,)? ] ),+ $(,)? ) => {{
        let mut map = StatusStepMap::new();
        $(
            map.insert(
                $status.to_string(),
                vec![ $( $step.to_string() ),+ ],
            );
        )+
        map
    }};
}

// ---------------------------------------------------------------------------
// RoleStepTable
// ---------------------------------------------------------------------------

/// The fixed role → status → steps mapping. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RoleStepTable {
    roles: IndexMap<String, StatusStepMap>,
}

impl RoleStepTable {
    /// Status/step assignments per project role, based on Product Launch
    /// Project v8.
    pub fn product_launch() -> Self {
        let mut roles = IndexMap::new();

        roles.insert(
            "Merchandiser".to_string(),
            statuses! {
                "Market-end Feedback" => ["Information Gathering", "Information Analysis", "Documentation"],
                "Sample Purchase" => ["Information Gathering", "Information Analysis", "Documentation"],
                "Competitor Sample Purchase" => ["Information Gathering"],
                "Market-end Feedback vs. Factory-end Sourcing Evaluation" => ["Information Analysis", "Documentation"],
                "Initiation Stage Wrap-up" => ["Check List Verification"],
                "Prototype Internal Communication" => ["Information Gathering", "Meeting Arrangement", "Actual Meeting", "Meeting Follow-up", "Documentation"],
                "Product Prototype Evaluation" => ["Information Analysis", "Documentation"],
                "MRD" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Pre-Launch Stage Wrap-up" => ["Check List Verification"],
                "Pilot-Run Sample Review" => ["Information Analysis", "Documentation"],
                "Initial PO Budget" => ["Information Analysis"],
                "Digital Creation Stage Wrap-Up" => ["Check List Verification"],
            },
        );

        roles.insert(
            "Buyer".to_string(),
            statuses! {
                "Sample Purchase" => ["Information Gathering", "Acquisition", "Documentation"],
                "Competitor Sample Purchase" => ["Acquisition", "Documentation"],
                "Factory-end Sourcing" => ["Information Gathering", "Information Analysis", "Documentation"],
                "Factory Sample Purchase" => ["Information Gathering", "Acquisition", "Documentation"],
                "Market-end Feedback vs. Factory-end Sourcing Evaluation" => ["Information Gathering"],
                "Initiation Stage Wrap-up" => ["Check List Verification"],
                "Prototype External Communication" => ["Information Gathering", "Meeting Arrangement", "Actual Meeting", "Meeting Follow-up", "Documentation"],
                "Product Prototype Evaluation" => ["Information Gathering"],
                "Prototype Stage Wrap-up" => ["Check List Verification"],
                "SKU-UP Initiation" => ["Task Processing", "Task Review", "Documentation"],
                "Product Specs" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Pre-Launch Stage Wrap-up" => ["Check List Verification"],
                "PRD" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Pilot-Run External Communication" => ["Information Gathering", "Meeting Arrangement", "Actual Meeting", "Meeting Follow-up", "Documentation"],
                "Pilot-Run Sample Review" => ["Information Gathering"],
                "QC Test Procedure" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Pilot-Run Stage Wrap-up" => ["Check List Verification"],
                "Initial PO Budget" => ["Information Gathering", "Documentation"],
                "PO Release" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Initial PO Stage Wrap-Up" => ["Check List Verification"],
            },
        );

        roles.insert(
            "Project Lead".to_string(),
            statuses! {
                "Market-end Feedback" => ["Approval Review", "Closed"],
                "Sample Purchase" => ["Approval Review", "Closed"],
                "Competitor Sample Purchase" => ["Approval Review", "Closed"],
                "Factory-end Sourcing" => ["Approval Review", "Closed"],
                "Factory Sample Purchase" => ["Approval Review", "Closed"],
                "Market-end Feedback vs. Factory-end Sourcing Evaluation" => ["Approval Review", "Closed"],
                "Initiation Stage Wrap-up" => ["Approval Review", "Closed"],
                "Prototype Internal Communication" => ["Information Gathering", "Approval Review", "Closed"],
                "Prototype External Communication" => ["Information Gathering", "Approval Review", "Closed"],
                "Product Prototype Evaluation" => ["Approval Review", "Closed"],
                "Prototype Stage Wrap-up" => ["Approval Review", "Closed"],
                "SKU-UP Initiation" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation", "Closed"],
                "Product Specs" => ["Approval Review", "Closed"],
                "MRD" => ["Approval Review", "Closed"],
                "Label Artworks" => ["Approval Review", "Closed"],
                "Product Instruction Manual" => ["Closed"],
                "Product Copy" => ["Closed"],
                "Picture Shots Planning" => ["Closed"],
                "Product Packaging Design" => ["Approval Review", "Closed"],
                "Pre-Launch Stage Wrap-up" => ["Approval Review", "Closed"],
                "PRD" => ["Approval Review", "Closed"],
                "Pilot-Run External Communication" => ["Information Gathering", "Approval Review", "Closed"],
                "Pilot-Run Sample Review" => ["Approval Review", "Closed"],
                "QC Test Procedure" => ["Approval Review", "Closed"],
                "Pilot-Run Stage Wrap-up" => ["Approval Review", "Closed"],
                "Initial PO Budget" => ["Approval Review", "Closed"],
                "PO Release" => ["Approval Review", "Closed"],
                "Initial PO Stage Wrap-Up" => ["Approval Review", "Closed"],
                "Digital Creation Stage Wrap-Up" => ["Approval Review", "Closed"],
            },
        );

        roles.insert(
            "Packaging Designer".to_string(),
            statuses! {
                "Label Artworks" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation"],
                "Product Packaging Design" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
            },
        );

        roles.insert(
            "Editor".to_string(),
            statuses! {
                "Product Instruction Manual" => ["Task Processing", "Approval Review"],
                "Product Copy" => ["Approval Review"],
            },
        );

        roles.insert(
            "Instruction Writer".to_string(),
            statuses! {
                "Product Instruction Manual" => ["Information Gathering", "Task Processing"],
            },
        );

        roles.insert(
            "Graphic Designer".to_string(),
            statuses! {
                "Product Instruction Manual" => ["Task Processing", "Task Review", "Documentation"],
                "Picture Shots Planning" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
                "Studio Shot Shooting" => ["Approval Review"],
                "Additional Sketching" => ["Approval Review"],
                "Outdoor Shot Shooting" => ["Approval Review", "Closed", "Task Review"],
                "Image Post-Editing" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation"],
            },
        );

        roles.insert(
            "Copy Writer".to_string(),
            statuses! {
                "Product Copy" => ["Information Gathering", "Task Processing", "Task Review", "Documentation"],
            },
        );

        roles.insert(
            "Graphic Master".to_string(),
            statuses! {
                "Picture Shots Planning" => ["Approval Review"],
                "Studio Shot Shooting" => ["Closed"],
                "Additional Sketching" => ["Closed"],
                "Image Post-Editing" => ["Approval Review", "Closed"],
                "Listing Feed Creation" => ["Information Gathering"],
            },
        );

        roles.insert(
            "Photographer".to_string(),
            statuses! {
                "Studio Shot Shooting" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation"],
                "Outdoor Shot Shooting" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation"],
            },
        );

        roles.insert(
            "Sketching Designer".to_string(),
            statuses! {
                "Additional Sketching" => ["Information Gathering", "Task Processing", "Approval Review", "Documentation"],
            },
        );

        Self { roles }
    }

    /// Lookup is case-sensitive; unknown roles return `None`.
    pub fn role(&self, name: &str) -> Option<&StatusStepMap> {
        self.roles.get(name)
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, &StatusStepMap)> {
        self.roles.iter().map(|(name, map)| (name.as_str(), map))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
