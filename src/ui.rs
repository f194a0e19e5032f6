//! The single page served at `/`: the input form, the result card and the
//! probability gauge. All rendering happens client-side; the page talks to
//! `/predict` with the same JSON the API exposes.

pub const PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Customer Churn Predictor</title>
<style>
body { background-color: #f5f7fa; font-family: sans-serif; margin: 0 auto; max-width: 960px; padding: 24px; }
.title-text { font-size: 28px; font-weight: 700; color: #2c3e50; text-align: center; margin-bottom: 0.3rem; }
.subtitle-text { font-size: 14px; color: #7f8c8d; text-align: center; margin-bottom: 1.5rem; }
.columns { display: flex; gap: 24px; }
.columns > div { flex: 1; }
label { display: block; font-size: 13px; color: #2c3e50; margin: 10px 0 2px; }
select, input { width: 100%; padding: 6px; box-sizing: border-box; }
button { margin-top: 20px; padding: 10px 24px; font-size: 16px; cursor: pointer; }
.result-card { padding: 20px; border-radius: 12px; background-color: #ffffff;
  box-shadow: 0px 4px 12px rgba(0,0,0,0.12); margin-top: 20px; }
.gauge { display: flex; justify-content: center; margin-top: 10px; }
</style>
</head>
<body>
<div class="title-text">Customer Churn Prediction</div>
<div class="subtitle-text">Enter customer details to predict whether they are likely to churn.</div>

<form id="churn-form">
<div class="columns">
  <div>
    <label>Gender</label>
    <select name="gender"><option>Female</option><option>Male</option></select>
    <label>Senior Citizen</label>
    <select name="SeniorCitizen"><option>No</option><option>Yes</option></select>
    <label>Partner</label>
    <select name="Partner"><option>No</option><option>Yes</option></select>
    <label>Dependents</label>
    <select name="Dependents"><option>No</option><option>Yes</option></select>
    <label>Tenure (months)</label>
    <input name="tenure" type="number" min="0" max="1000" value="12">
  </div>
  <div>
    <label>Phone Service</label>
    <select name="PhoneService"><option>No</option><option>Yes</option></select>
    <label>Multiple Lines</label>
    <select name="MultipleLines"><option>No</option><option>Yes</option><option>No phone service</option></select>
    <label>Internet Service</label>
    <select name="InternetService"><option>DSL</option><option>Fiber optic</option><option>No</option></select>
    <label>Online Security</label>
    <select name="OnlineSecurity"><option>No</option><option>Yes</option><option>No internet service</option></select>
    <label>Online Backup</label>
    <select name="OnlineBackup"><option>No</option><option>Yes</option><option>No internet service</option></select>
  </div>
  <div>
    <label>Device Protection</label>
    <select name="DeviceProtection"><option>No</option><option>Yes</option><option>No internet service</option></select>
    <label>Tech Support</label>
    <select name="TechSupport"><option>No</option><option>Yes</option><option>No internet service</option></select>
    <label>Streaming TV</label>
    <select name="StreamingTV"><option>No</option><option>Yes</option><option>No internet service</option></select>
    <label>Streaming Movies</label>
    <select name="StreamingMovies"><option>No</option><option>Yes</option><option>No internet service</option></select>
    <label>Contract</label>
    <select name="Contract"><option>Month-to-month</option><option>One year</option><option>Two year</option></select>
    <label>Paperless Billing</label>
    <select name="PaperlessBilling"><option>No</option><option>Yes</option></select>
    <label>Payment Method</label>
    <select name="PaymentMethod">
      <option>Electronic check</option><option>Mailed check</option>
      <option>Bank transfer (automatic)</option><option>Credit card (automatic)</option>
    </select>
  </div>
</div>
<label>Monthly Charges</label>
<input name="MonthlyCharges" type="number" min="0" max="200" step="1" value="70">
<label>Total Charges</label>
<input name="TotalCharges" type="number" min="0" max="10000" step="10" value="500">
<button type="submit">Predict Churn</button>
</form>

<div id="result"></div>

<script>
const NUMERIC = ["tenure", "MonthlyCharges", "TotalCharges"];

document.getElementById("churn-form").addEventListener("submit", async (ev) => {
  ev.preventDefault();
  const payload = {};
  for (const [name, value] of new FormData(ev.target)) {
    payload[name] = NUMERIC.includes(name) ? Number(value) : value;
  }
  const target = document.getElementById("result");
  try {
    const resp = await fetch("/predict", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(payload),
    });
    const body = await resp.json();
    if (!resp.ok) {
      target.innerHTML = '<div class="result-card"><h3 style="color:#e74c3c">Prediction failed</h3><p>' +
        (body.error || "unknown error") + "</p></div>";
      return;
    }
    const color = body.will_churn ? "#e74c3c" : "#2ecc71";
    const verdict = body.will_churn ? "Customer Will CHURN" : "Customer Will NOT Churn";
    // Gauge circle: r=65, circumference about 408; arc length tracks probability.
    const arc = Math.round(body.probability * 408);
    target.innerHTML =
      '<div class="result-card">' +
      '<h3 style="color:' + color + '">' + verdict + "</h3>" +
      '<h4>Probability: <span style="color:' + color + ';font-weight:700">' +
      body.probability.toFixed(2) + "</span></h4>" +
      '<div class="gauge"><svg width="160" height="160">' +
      '<circle cx="80" cy="80" r="65" stroke="#dfe6e9" stroke-width="12" fill="none"/>' +
      '<circle cx="80" cy="80" r="65" stroke="' + color + '" stroke-width="12" fill="none" ' +
      'stroke-dasharray="' + arc + ' 408" transform="rotate(-90 80 80)"/>' +
      "</svg></div></div>";
  } catch (err) {
    target.innerHTML = '<div class="result-card"><h3 style="color:#e74c3c">Prediction failed</h3><p>' +
      err + "</p></div>";
  }
});
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::PAGE;

    #[test]
    fn form_covers_every_model_field() {
        for field in crate::encode::KNOWN_FIELDS {
            assert!(
                PAGE.contains(&format!("name=\"{field}\"")),
                "form is missing an input for {field}"
            );
        }
    }

    #[test]
    fn form_posts_to_the_predict_endpoint() {
        assert!(PAGE.contains("fetch(\"/predict\""));
    }
}
