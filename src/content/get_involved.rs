use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🌟 Get Involved with nextPay");

    out.heading("🤝 Contribute to nextPay");
    out.markdown(
        "We welcome contributions from the community to help shape the future of nextPay. Here's how you can get involved and make an impact:",
    );
    out.markdown(
        r#"1. **Fork the Repository**: Click the "Fork" button on the [nextPay GitHub repository](https://github.com/nextPay/nextPay) to create your own copy of the project. 🍴
2. **Clone Your Fork**: Clone the repository to your local machine using:

    ```bash
    git clone https://github.com/your-username/nextPay.git
    ```

    🖥️
3. **Set Up Development Environment**: Navigate to the project directory and install dependencies:

    ```bash
    cd nextPay
    npm install
    ```

    ⚙️
4. **Make Changes**: Create a new branch, make your changes, and commit them. ✏️
5. **Submit a Pull Request**: Push your changes to your fork and submit a pull request to contribute your improvements. 🔄"#,
    );

    out.markdown(
        "We're excited to see your contributions! Thank you for being a part of the nextPay community. 🙌",
    );
    out.markdown("[Visit the nextPay GitHub Repository](https://github.com/harshit340/NextPay)");
}
