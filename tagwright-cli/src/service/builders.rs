//! Tag body builders
//!
//! Pure assembly of the tag definitions this tool installs. The parameter
//! shapes follow the management API's grammar for the respective tag
//! templates; nothing here talks to the network.

use tagwright_core::domain::parameter::Parameter;
use tagwright_core::domain::tag::TagType;
use tagwright_core::dto::tag::TagBody;

/// Markup injected by the pop-up tag: a hidden banner revealed five seconds
/// after page load.
const POPUP_HTML: &str = r#"<div id="myPopup" style="display:none;">
  <h2>Welcome to Our Website!</h2>
  <p>Subscribe to our newsletter for updates.</p>
</div>
<script>
  setTimeout(function () {
    document.getElementById("myPopup").style.display = "block";
  }, 5000);
</script>"#;

/// Custom-HTML tag that injects the pop-up markup, firing on `trigger_id`
pub fn popup_tag_body(name: impl Into<String>, trigger_id: impl Into<String>) -> TagBody {
    TagBody {
        name: name.into(),
        tag_type: TagType::Html,
        parameter: vec![Parameter::template("html", POPUP_HTML)],
        firing_trigger_id: vec![trigger_id.into()],
    }
}

/// GA4 event tag ("gaawe") reporting into `measurement_id`
///
/// The `triggerId` parameter stays blank and no firing triggers are
/// attached: the installed tag sits inert until it is wired up in the
/// Tag Manager console.
pub fn ga4_event_tag_body(name: impl Into<String>, measurement_id: impl Into<String>) -> TagBody {
    let measurement_id = measurement_id.into();

    TagBody {
        name: name.into(),
        tag_type: TagType::Gaawe,
        parameter: vec![
            Parameter::template("eventName", "dynamic_event"),
            Parameter::template("measurementId", measurement_id.clone()),
            Parameter::template("triggerId", ""),
            Parameter::map(
                "eventParameters",
                vec![
                    Parameter::template("name", "${parameterName}"),
                    Parameter::template("value", "${parameterValue}"),
                ],
            ),
            Parameter::template("measurementIdOverride", measurement_id),
            Parameter::list("eventSettingsTable", Vec::new()),
        ],
        firing_trigger_id: Vec::new(),
    }
}

/// GA4 configuration tag ("gaawc") firing on `trigger_ids`, in order
pub fn ga4_config_tag_body(
    name: impl Into<String>,
    measurement_id: impl Into<String>,
    trigger_ids: Vec<String>,
) -> TagBody {
    TagBody {
        name: name.into(),
        tag_type: TagType::Gaawc,
        parameter: vec![Parameter::template("measurementId", measurement_id)],
        firing_trigger_id: trigger_ids,
    }
}
