//! Tool definitions and library management
//!
//! This module provides:
//! - Tool types and geometry
//! - Per-tool cutting parameters (feeds, depth per pass, retract height)
//! - Tool library management (add, remove, search)
//! - Standard tool library initialization

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tool types for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ToolType {
    /// Flat end mill
    EndMillFlat,
    /// Ball end mill / ball nose
    EndMillBall,
    /// V-bit engraving tool
    VBit,
    /// Drill bit (twist drill)
    DrillBit,
    /// Specialty tool
    Specialty,
}

impl ToolType {
    /// Get all tool types
    pub fn all() -> &'static [ToolType] {
        &[
            ToolType::EndMillFlat,
            ToolType::EndMillBall,
            ToolType::VBit,
            ToolType::DrillBit,
            ToolType::Specialty,
        ]
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndMillFlat => write!(f, "Flat End Mill"),
            Self::EndMillBall => write!(f, "Ball End Mill"),
            Self::VBit => write!(f, "V-Bit"),
            Self::DrillBit => write!(f, "Drill Bit"),
            Self::Specialty => write!(f, "Specialty"),
        }
    }
}

/// Tool identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ToolId(
    /// The unique string identifier for the tool.
    pub String,
);

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tool default cutting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCuttingParams {
    /// Recommended RPM
    pub rpm: u32,
    /// Default feed rate in mm/min
    pub feed_rate: f64,
    /// Default plunge rate in mm/min
    pub plunge_rate: f64,
    /// Default depth per pass in mm
    pub depth_per_pass: f64,
    /// Safe Z height for retraction and rapid moves, in mm above stock top
    pub retract_height: f64,
}

impl Default for ToolCuttingParams {
    fn default() -> Self {
        Self {
            rpm: 12000,
            feed_rate: 1500.0,
            plunge_rate: 750.0,
            depth_per_pass: 3.0,
            retract_height: 5.0,
        }
    }
}

/// Complete tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool identifier
    pub id: ToolId,
    /// Tool number (for reference)
    pub number: u32,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Tool type
    pub tool_type: ToolType,
    /// Cutting diameter in mm
    pub diameter: f64,
    /// Number of flutes
    pub flutes: u32,
    /// Default cutting parameters
    pub params: ToolCuttingParams,
}

impl Tool {
    /// Create a new tool with basic properties
    pub fn new(id: ToolId, number: u32, name: String, tool_type: ToolType, diameter: f64) -> Self {
        Self {
            id,
            number,
            name,
            description: String::new(),
            tool_type,
            diameter,
            flutes: 2,
            params: ToolCuttingParams::default(),
        }
    }

    /// Get a descriptive string for the tool
    pub fn description_short(&self) -> String {
        format!(
            "{} - {} dia, {} flutes",
            self.name, self.diameter, self.flutes
        )
    }
}

/// Tool library - manages collection of tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolLibrary {
    /// Collection of tools by ID
    tools: HashMap<ToolId, Tool>,
    /// Next available tool number
    next_tool_number: u32,
}

impl ToolLibrary {
    /// Create a new empty tool library
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            next_tool_number: 1,
        }
    }

    /// Add a tool to the library
    pub fn add_tool(&mut self, tool: Tool) {
        if tool.number >= self.next_tool_number {
            self.next_tool_number = tool.number + 1;
        }
        self.tools.insert(tool.id.clone(), tool);
    }

    /// Get a tool by ID
    pub fn get_tool(&self, id: &ToolId) -> Option<&Tool> {
        self.tools.get(id)
    }

    /// Get a mutable reference to a tool
    pub fn get_tool_mut(&mut self, id: &ToolId) -> Option<&mut Tool> {
        self.tools.get_mut(id)
    }

    /// Remove a tool from the library
    pub fn remove_tool(&mut self, id: &ToolId) -> Option<Tool> {
        self.tools.remove(id)
    }

    /// Get all tools
    pub fn get_all_tools(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get tools by type
    pub fn get_tools_by_type(&self, tool_type: ToolType) -> Vec<&Tool> {
        self.tools
            .values()
            .filter(|t| t.tool_type == tool_type)
            .collect()
    }

    /// Get the next available tool number
    pub fn next_tool_number(&self) -> u32 {
        self.next_tool_number
    }

    /// Get the number of tools in the library
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize standard tool library with common tools
pub fn init_standard_library() -> ToolLibrary {
    let mut library = ToolLibrary::new();

    // 1/8" Flat End Mill
    let mut tool1 = Tool::new(
        ToolId("tool_1_8_flat".to_string()),
        1,
        "1/8\" Flat End Mill".to_string(),
        ToolType::EndMillFlat,
        3.175,
    );
    tool1.params.rpm = 24000;
    tool1.params.feed_rate = 1000.0;
    tool1.params.plunge_rate = 400.0;
    tool1.params.depth_per_pass = 1.5;
    library.add_tool(tool1);

    // 1/4" Flat End Mill
    let mut tool2 = Tool::new(
        ToolId("tool_1_4_flat".to_string()),
        2,
        "1/4\" Flat End Mill".to_string(),
        ToolType::EndMillFlat,
        6.35,
    );
    tool2.params.rpm = 18000;
    tool2.params.feed_rate = 1500.0;
    library.add_tool(tool2);

    // 90 degree V-Bit
    let mut tool3 = Tool::new(
        ToolId("tool_vbit_90".to_string()),
        3,
        "90 degree V-Bit".to_string(),
        ToolType::VBit,
        6.0,
    );
    tool3.flutes = 1;
    tool3.params.rpm = 20000;
    tool3.params.feed_rate = 1200.0;
    tool3.params.depth_per_pass = 2.0;
    library.add_tool(tool3);

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_add_get_remove() {
        let mut library = ToolLibrary::new();
        assert!(library.is_empty());

        let id = ToolId("test_tool".to_string());
        let tool = Tool::new(
            id.clone(),
            5,
            "Test Tool".to_string(),
            ToolType::EndMillFlat,
            3.0,
        );
        library.add_tool(tool);

        assert_eq!(library.len(), 1);
        assert_eq!(library.next_tool_number(), 6);
        assert_eq!(library.get_tool(&id).unwrap().diameter, 3.0);

        library.remove_tool(&id);
        assert!(library.is_empty());
    }

    #[test]
    fn test_standard_library_is_usable() {
        let library = init_standard_library();
        assert!(!library.is_empty());
        for tool in library.get_all_tools() {
            assert!(tool.diameter > 0.0);
            assert!(tool.params.depth_per_pass > 0.0);
            assert!(tool.params.retract_height > 0.0);
        }
    }

    #[test]
    fn test_tool_serde_roundtrip() {
        let tool = Tool::new(
            ToolId("roundtrip".to_string()),
            9,
            "Roundtrip".to_string(),
            ToolType::VBit,
            6.0,
        );
        let json = serde_json::to_string(&tool).unwrap();
        let back: Tool = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, tool.id);
        assert_eq!(back.params.depth_per_pass, tool.params.depth_per_pass);
    }
}
